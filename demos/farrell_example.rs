use farrell::diffusion::{FarrellResult, get_rd_farrell};

fn main() {
    // Two tissue-like media, coefficients in cm^-1
    let rd = match get_rd_farrell([0.001, 0.01], [1.0, 2.0], 1.4) {
        Ok(rd) => rd,
        Err(e) => {
            eprintln!("Failed to compute Rd: {}", e);
            return;
        }
    };

    println!("Rd: {}", rd);

    println!("{}", FarrellResult::compute(0.01, 2.0, 1.4));
}
