use fittrack_core::cli::{run_packages, DEMO_PACKAGES};

fn main() {
    run_packages(DEMO_PACKAGES);
}
