pub mod projection_service;
