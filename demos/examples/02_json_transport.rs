//! A minimal transport around the transform: JSON body + query string in,
//! status code + JSON envelope out.
//!
//! Usage: cargo run --example 02_json_transport -- '<query>' '<json body>'
use cadence::Cadence;
use cadence_demos::common::{options_from_query, to_response};

const DEFAULT_QUERY: &str = "resampleFrequency=monthEnd&resampleFunction=sum";
const DEFAULT_BODY: &str = r#"[["2017-05-05", 22.5], ["2017-05-20", 10.0], ["2017-10-10", 44.5]]"#;

fn main() {
    let mut args = std::env::args().skip(1);
    let query = args.next().unwrap_or_else(|| DEFAULT_QUERY.to_string());
    let body = args.next().unwrap_or_else(|| DEFAULT_BODY.to_string());

    let cadence = Cadence::builder().build();
    let options = options_from_query(&query);
    let (status, payload) = to_response(cadence.resample_json(&body, &options));

    println!("{status} {payload}");
    if status != 200 {
        std::process::exit(1);
    }
}
