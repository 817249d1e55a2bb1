mod integration;
mod system_ping;
