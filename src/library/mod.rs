pub mod httpdate;
pub mod log;
pub mod releasetag;
pub mod template;
