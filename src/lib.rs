//! Extracurricular activity sign-up service for Mergington High School.

pub mod config;
pub mod database;
pub mod models;
pub mod services;
pub mod web;
