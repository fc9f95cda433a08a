mod adapter_test;
mod util;
