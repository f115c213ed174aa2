use olc_rs::{OlcError, decode, encode, recover, shorten};

fn main() -> Result<(), OlcError> {
    let lat = 47.365590;
    let lon = 8.524997;

    let code = encode(lat, lon, 10)?;

    println!("Plus code: {}", code);

    let area = decode(code.as_str())?;
    println!(
        "Center: ({}, {})",
        area.center_latitude(),
        area.center_longitude()
    );
    println!("Bounds: {:?}", area.to_rect());

    let short = shorten(code.as_str(), 47.5, 8.5)?;
    println!("Shortened near (47.5, 8.5): {}", short);

    let recovered = recover(short.as_str(), 47.5, 8.5)?;
    println!("Recovered: {}", recovered);

    Ok(())
}
