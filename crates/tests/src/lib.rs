#[cfg(test)]
mod common;

#[cfg(test)]
mod nav_filter_tests;


#[cfg(test)]
mod session_accessor_tests;

#[cfg(test)]
mod shell_dispatch_tests;
