//! Macros that cut the boilerplate out of widget tests.

mod widget_test;
