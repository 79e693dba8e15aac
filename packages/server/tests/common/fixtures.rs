use serde_json::{json, Value};

/// A complete job posting document, as the HR frontend submits it
pub fn job_body() -> Value {
    json!({
        "title": "Backend Engineer",
        "location": "Dhaka, Bangladesh",
        "jobType": "Full-Time",
        "category": "Engineering",
        "applicationDeadline": "2026-09-01",
        "salaryRange": { "min": 40000, "max": 60000, "currency": "bdt" },
        "description": "Design and operate the job portal backend services.",
        "company": "Acme Corp",
        "companyLogo": "https://example.com/acme.png",
        "requirements": ["Rust", "PostgreSQL", "HTTP APIs"],
        "hrEmail": "hr@acme.com",
        "hrName": "Dana HR"
    })
}

/// An application document for a job, as the applicant form submits it
pub fn application_body(job_id: &str, applicant_email: &str) -> Value {
    json!({
        "jobId": job_id,
        "applicantEmail": applicant_email,
        "linkedinUrl": "https://linkedin.com/in/applicant",
        "githubUrl": "https://github.com/applicant",
        "resumeUrl": "https://example.com/resume.pdf"
    })
}
