pub mod feedback;
pub mod layout;
pub mod login;
pub mod oauth;
pub mod questionnaire;
pub mod results;
