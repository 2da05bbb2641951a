//! Hard-coded mock data the site ships with. Everything is process-local
//! and reset on restart.

use crate::models::abstracts::{Abstract, AbstractStore};
use crate::models::mailing::{DeliveryStatus, MailingLog, SentMailing};
use crate::models::participant::{Participant, ParticipantRegistry, ParticipationType};
use crate::models::status::ModerationStatus;

pub fn participants() -> ParticipantRegistry {
    ParticipantRegistry::with_participants(vec![
        Participant {
            id: 1,
            first_name: "Ivan".into(),
            last_name: "Ivanov".into(),
            email: "ivanov@example.com".into(),
            organization: "Moscow State University".into(),
            position: "Professor".into(),
            participation_type: ParticipationType::Speaker,
            status: ModerationStatus::Approved,
            registered_at: "2024-12-10".into(),
            password: None,
        },
        Participant {
            id: 2,
            first_name: "Maria".into(),
            last_name: "Petrova".into(),
            email: "petrova@example.com".into(),
            organization: "St Petersburg University".into(),
            position: String::new(),
            participation_type: ParticipationType::Listener,
            status: ModerationStatus::Pending,
            registered_at: "2024-12-11".into(),
            password: None,
        },
        Participant {
            id: 3,
            first_name: "Petr".into(),
            last_name: "Sidorov".into(),
            email: "sidorov@example.com".into(),
            organization: "Novosibirsk State University".into(),
            position: String::new(),
            participation_type: ParticipationType::Speaker,
            status: ModerationStatus::Pending,
            registered_at: "2024-12-12".into(),
            password: None,
        },
    ])
}

pub fn abstracts() -> AbstractStore {
    AbstractStore::with_abstracts(vec![
        Abstract {
            id: 1,
            title: "Machine learning methods in data analysis".into(),
            author: "Ivanov I.I.".into(),
            email: "ivanov@example.com".into(),
            content: "We survey recent applications of machine learning to data analysis."
                .into(),
            keywords: "machine learning, data analysis".into(),
            file: None,
            submitted_at: "2024-12-11".into(),
            status: ModerationStatus::Pending,
        },
        Abstract {
            id: 2,
            title: "New approaches to algorithm optimization".into(),
            author: "Sidorov P.A.".into(),
            email: "sidorov@example.com".into(),
            content: "We propose several optimizations for classic algorithms.".into(),
            keywords: "optimization, algorithms".into(),
            file: None,
            submitted_at: "2024-12-12".into(),
            status: ModerationStatus::Pending,
        },
    ])
}

pub fn mailing_history() -> MailingLog {
    MailingLog::with_history(vec![
        SentMailing {
            subject: "Conference invitation".into(),
            recipient_count: 156,
            sent_at: "2024-12-10 14:30".into(),
            status: DeliveryStatus::Delivered,
        },
        SentMailing {
            subject: "Registration confirmed".into(),
            recipient_count: 12,
            sent_at: "2024-12-12 09:15".into(),
            status: DeliveryStatus::Delivered,
        },
    ])
}
