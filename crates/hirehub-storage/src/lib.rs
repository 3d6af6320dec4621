//! # hirehub-storage
//!
//! Resume blob storage. The rest of the system treats resumes as opaque:
//! hand bytes to a [`ResumeStore`], get a public URL back. Validation of
//! file type and size happens here, before any bytes are written.

pub mod local;
pub mod store;
pub mod validate;

pub use local::LocalResumeStore;
pub use store::ResumeStore;
pub use validate::ResumePolicy;
