/// Wire types shared by the API handlers, the auth gate and the test suites.
pub mod api;
