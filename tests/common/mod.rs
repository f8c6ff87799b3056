pub mod external_server;
pub mod report_server;
