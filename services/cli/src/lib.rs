mod cli;
mod demo;
mod estimate;
mod infra;
mod tables;

use grade_estimator::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
