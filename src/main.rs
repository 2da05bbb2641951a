//! Demo driver: seeds the mock data and walks every workflow once, playing
//! the role of the UI event loop. All output goes through the log-backed
//! notifier; nothing persists.

use std::time::Duration;

use chrono::Local;
use serde_json::json;

use confhub::audit::AuditLog;
use confhub::auth::login::LoginForm;
use confhub::config::ConferenceConfig;
use confhub::models::abstracts::AbstractForm;
use confhub::models::mailing::EmailTemplate;
use confhub::models::participant::{ParticipationType, RegistrationForm};
use confhub::models::status::ModerationStatus;
use confhub::seed;
use confhub::ticker;
use confhub::ui::{LogNotifier, Notifier, View};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = ConferenceConfig::from_env();
    log::info!(
        "{} — starts {}, organizer {}",
        config.name,
        config.starts_at,
        config.organizer_email
    );

    let notifier = LogNotifier;
    let mut participants = seed::participants();
    let mut abstracts = seed::abstracts();
    let mut mailings = seed::mailing_history();
    let mut audit = AuditLog::new();

    let today = Local::now().format("%Y-%m-%d").to_string();
    let now_minute = Local::now().format("%Y-%m-%d %H:%M").to_string();

    // Home page: run the countdown for a few ticks, then tear it down the
    // way leaving the page would.
    let handle = ticker::spawn_countdown(config.starts_at, |left| {
        log::info!(
            "Until the conference: {} days {:02}:{:02}:{:02}",
            left.days,
            left.hours,
            left.minutes,
            left.seconds
        );
    });
    tokio::time::sleep(Duration::from_secs(3)).await;
    handle.stop();
    handle.join().await;

    // Registration page.
    let form = RegistrationForm {
        first_name: "Anna".into(),
        last_name: "Smirnova".into(),
        email: "smirnova@example.com".into(),
        password: "correct-horse".into(),
        confirm_password: "correct-horse".into(),
        organization: "Ural Federal University".into(),
        position: "Researcher".into(),
        participation_type: Some(ParticipationType::Poster),
        agree_to_terms: true,
    };
    match participants.register(&form, &today) {
        Ok(id) => {
            notifier.success("Registration complete! Check your email for confirmation");
            log::info!("-> navigate to {}", View::Login.path());
            audit.record(
                "participant.registered",
                "participant",
                id,
                json!({"email": form.email}),
                &now_minute,
            );
        }
        Err(e) => notifier.error(&e.to_string()),
    }

    // Login page (presence-only check, by design).
    let login = LoginForm {
        email: "smirnova@example.com".into(),
        password: "correct-horse".into(),
    };
    match login.submit() {
        Ok(view) => {
            notifier.success("Signed in successfully");
            log::info!("-> navigate to {}", view.path());
        }
        Err(e) => notifier.error(&e.to_string()),
    }

    // Dashboard: submit an abstract.
    let submission = AbstractForm {
        title: "Poster: visualizing large graphs".into(),
        authors: "Smirnova A.V.".into(),
        content: "We demonstrate a layout technique for graphs with millions of edges.".into(),
        keywords: "visualization, graphs".into(),
        file: None,
    };
    match abstracts.submit(&submission, "Anna Smirnova", "smirnova@example.com", &today) {
        Ok(id) => {
            notifier.success("Abstract submitted for moderation");
            audit.record(
                "abstract.submitted",
                "abstract",
                id,
                json!({"title": submission.title}),
                &now_minute,
            );
        }
        Err(e) => notifier.error(&e.to_string()),
    }

    // Admin panel: moderate the pending queue.
    let pending_ids: Vec<i64> = participants
        .filtered("", Some(ModerationStatus::Pending))
        .iter()
        .map(|p| p.id)
        .collect();
    for id in pending_ids {
        match participants.approve(id) {
            Ok(p) => {
                notifier.success("Application approved, the participant will be notified");
                audit.record(
                    "participant.approved",
                    "participant",
                    p.id,
                    json!({"summary": format!("Approved participant #{}", p.id)}),
                    &now_minute,
                );
            }
            Err(e) => notifier.error(&e.to_string()),
        }
    }
    if let Ok(entry) = abstracts.approve(1) {
        notifier.success("Abstract approved");
        audit.record(
            "abstract.approved",
            "abstract",
            entry.id,
            json!({"title": entry.title}),
            &now_minute,
        );
    }

    // Admin panel: send a preset mailing to the approved participants.
    let template = EmailTemplate::registration_confirmed();
    match mailings.send(&template, participants.all(), participants.selected(), &now_minute) {
        Ok(count) => {
            notifier.success(&format!("Mailing queued for {count} recipient(s)"));
            audit.record(
                "mailing.sent",
                "mailing",
                mailings.len() as i64,
                json!({"subject": template.subject, "recipient_count": count}),
                &now_minute,
            );
        }
        Err(e) => notifier.error(&e.to_string()),
    }

    log::info!(
        "Done: {} participants ({} approved), {} abstracts, {} mailings, {} audit entries",
        participants.len(),
        participants.count_by_status(ModerationStatus::Approved),
        abstracts.len(),
        mailings.len(),
        audit.entries().len()
    );
}
