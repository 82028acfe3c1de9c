use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy voter-turnout.csv to OUT_DIR for include_str
    let csv_src = Path::new("../fixtures/voter-turnout.csv");
    if csv_src.exists() {
        fs::copy(csv_src, Path::new(&out_dir).join("voter-turnout.csv")).unwrap();
    } else {
        fs::write(
            Path::new(&out_dir).join("voter-turnout.csv"),
            "State,Percent of Population that Registered to Vote,Percentage of Population that Voted,Overall Voter Fairness Score (out of 34.5)\n\
             Alabama,69.1,63.1,10.25\n",
        )
        .unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/voter-turnout.csv");
}
