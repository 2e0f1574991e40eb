use crate::infra::build_services;
use clap::Args;
use openlab::auth::session::{Identity, Profile, SessionMode};
use openlab::config::AppConfig;
use openlab::error::AppError;
use openlab::workflows::recruiting::{ApplyRequest, NoticeDraft};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Data directory for the demo stores (defaults to the configured one)
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
    /// Resume text submitted by the demo applicant
    #[arg(long)]
    pub(crate) resume: Option<String>,
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(data_dir) = args.data_dir {
        config.storage.data_dir = data_dir;
    }

    let services = build_services(&config)?;
    let operator = Identity::Master {
        mode: SessionMode::Lab,
        profile: Profile {
            email: "operator@openlab.dev".to_string(),
            name: "Demo Operator".to_string(),
            lab_name: "Demo Lab".to_string(),
        },
    };

    println!("OpenLab recruiting demo");
    println!("Data directory: {}", config.storage.data_dir.display());

    let notice = match services.board.post(
        NoticeDraft {
            id: None,
            title: "Sensor log labeling sprint".to_string(),
            description: "Label two weeks of building sensor logs for a forecasting model."
                .to_string(),
            duration: "2 weeks".to_string(),
            deadline: "2026-09-30".to_string(),
            status: None,
            criteria: "Python, Pandas, attention to detail".to_string(),
            roles: vec!["annotation".to_string()],
        },
        Some(&operator),
    ) {
        Ok(notice) => notice,
        Err(err) => {
            println!("  Posting rejected: {err}");
            return Ok(());
        }
    };
    println!("\nPosted notice {} ({})", notice.id, notice.title);

    let listing = services.board.list();
    println!("Board now lists {} notices (seed included)", listing.len());

    let resume_text = args.resume.unwrap_or_else(|| {
        "Graduate student with python and pandas experience; careful, detail oriented annotator."
            .to_string()
    });

    let application = match services
        .intake
        .submit(ApplyRequest {
            notice_id: notice.id.clone(),
            name: "Demo Applicant".to_string(),
            email: "applicant@openlab.dev".to_string(),
            message: "Available immediately.".to_string(),
            resume_filename: "resume.txt".to_string(),
            resume_text,
        })
        .await
    {
        Ok(application) => application,
        Err(err) => {
            println!("  Submission rejected: {err}");
            return Ok(());
        }
    };

    println!("\nStored application {}", application.id);
    if let Some(screening) = &application.screening_result {
        println!("Screening: {}", screening.overall_reasoning);
        for decision in &screening.criteria_decisions {
            let mark = if decision.decision { "+" } else { "-" };
            println!("  [{mark}] {}: {}", decision.criteria, decision.reasoning);
        }
    }

    let replay = match services
        .intake
        .submit(ApplyRequest {
            notice_id: notice.id.clone(),
            name: "Demo Applicant".to_string(),
            email: "applicant@openlab.dev".to_string(),
            message: "Second click on the submit button.".to_string(),
            resume_filename: "resume.txt".to_string(),
            resume_text: "a different resume entirely".to_string(),
        })
        .await
    {
        Ok(application) => application,
        Err(err) => {
            println!("  Resubmission rejected: {err}");
            return Ok(());
        }
    };
    println!(
        "\nResubmission returned the original record ({} == {})",
        replay.id, application.id
    );

    let applicants = services.board.applications_for(&notice.id);
    println!("Applicant count for {}: {}", notice.id, applicants.len());

    Ok(())
}
