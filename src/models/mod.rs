// Model module exports

pub mod event;
