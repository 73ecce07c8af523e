// Interface adapters: HTTP client for the upstream validator.

pub mod clients;
