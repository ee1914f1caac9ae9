mod accounts;
mod auth;
mod concurrency;
