pub mod activity_directory_service;
