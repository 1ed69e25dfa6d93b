pub mod cache;

mod dto;
pub use dto::{User, UserResume};

mod fetch;
pub use fetch::{get_current_user, get_user_resume};

mod resume;
pub use resume::{
    FileStore, FileStoreError, MAX_RESUME_BYTES, UploadedResume, finalize_resume_upload,
    validate_resume_file,
};
