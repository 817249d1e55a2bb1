mod gateway_test;
mod util;
