pub mod busy;
pub mod draft;
