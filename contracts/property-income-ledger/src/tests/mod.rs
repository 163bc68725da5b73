mod transfers;
mod utils;
