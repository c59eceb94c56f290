pub mod alert_banner;
pub mod edit_modal;
pub mod loading;
pub mod modal;
pub mod user_card;
pub mod user_form;
pub mod user_list;
