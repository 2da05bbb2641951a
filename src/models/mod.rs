pub mod abstracts;
pub mod countdown;
pub mod mailing;
pub mod participant;
pub mod status;
