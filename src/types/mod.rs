pub mod event;
pub mod form;
pub mod phrases;
pub mod workout;
