pub mod init;
pub mod root;
pub mod sum;
pub mod view;
