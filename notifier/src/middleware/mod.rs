pub mod invocation_id;
