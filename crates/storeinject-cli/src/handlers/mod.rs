pub mod inject;

pub use inject::InjectHandler;
