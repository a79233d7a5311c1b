pub mod certificate_list;
pub mod nav;
pub mod project_list;

pub use certificate_list::{CertificateAction, CertificateListComponent};
pub use nav::{NavAction, NavComponent};
pub use project_list::{ProjectAction, ProjectListComponent};
