use crate::reports;

pub fn run() {
    reports::print_methods();
}
