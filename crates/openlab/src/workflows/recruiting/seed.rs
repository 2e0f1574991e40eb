use super::domain::{Notice, NoticeStatus};

/// Static seed listings shown below lab-posted notices. Read-only: they carry
/// no owner, so status updates and deletes never match them.
pub fn seed_notices() -> Vec<Notice> {
    vec![
        Notice {
            id: "NL-2401".to_string(),
            title: "Stock Prediction Transformer Model - Data Preprocessing".to_string(),
            description: "Design and implement a preprocessing pipeline for large-scale \
                          time-series stock data, including missing-value and outlier \
                          handling. Experience with Python, Pandas, and NumPy expected."
                .to_string(),
            duration: "1 month".to_string(),
            deadline: "2026-02-10".to_string(),
            status: NoticeStatus::Open,
            criteria: "Python, Pandas, NumPy, time-series preprocessing".to_string(),
            roles: vec!["data engineering".to_string()],
            lab_name: "Industrial Engineering Lab".to_string(),
            owner_email: String::new(),
            created_at: "2026-01-05T09:00:00Z".to_string(),
        },
        Notice {
            id: "NL-2402".to_string(),
            title: "Bio-Signal Classification - Feature Extraction".to_string(),
            description: "Preprocess ECG/EEG recordings and extract features for a \
                          classification study. Prior signal-processing projects are a plus."
                .to_string(),
            duration: "3 weeks".to_string(),
            deadline: "2026-02-05".to_string(),
            status: NoticeStatus::Open,
            criteria: "signal processing, Python".to_string(),
            roles: vec!["research assistant".to_string()],
            lab_name: "NeuroTech Research Group".to_string(),
            owner_email: String::new(),
            created_at: "2026-01-04T09:00:00Z".to_string(),
        },
        Notice {
            id: "NL-2403".to_string(),
            title: "Smart Campus Energy Forecasting - Data Labeling".to_string(),
            description: "Label building energy-usage logs for a forecasting model. \
                          Accuracy matters more than speed; careful reviewers wanted."
                .to_string(),
            duration: "2 weeks".to_string(),
            deadline: "2026-01-30".to_string(),
            status: NoticeStatus::Open,
            criteria: "attention to detail".to_string(),
            roles: vec!["annotation".to_string()],
            lab_name: "Smart Systems Lab".to_string(),
            owner_email: String::new(),
            created_at: "2026-01-03T09:00:00Z".to_string(),
        },
    ]
}
