pub mod documents;
pub mod navigation;
pub mod session;
pub mod sources;
pub mod status;

pub use session::ViewerSession;
pub use sources::SourceTarget;
