mod cors_headers;

pub use cors_headers::permissive_cors_headers;
