//! Integration tests for chapview.

mod analyze_test;
mod config_test;
mod controller_test;
mod helpers;
mod render_test;
