use std::error::Error;

use qrdispenser::Dispenser;

fn main() -> Result<(), Box<dyn Error>> {
    // Simplest usage - light theme unless the appearance source says otherwise
    let img = Dispenser::new().generate_text("Hello, World!")?;

    img.save("./simple_qr.png")?;

    println!("Simple QR code saved to: simple_qr.png");
    Ok(())
}
