mod application;
mod domain;
mod presentation;
