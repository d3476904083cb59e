mod admin_test;
mod middleware_test;
mod student_test;
