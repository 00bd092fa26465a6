// What you SEE when you run this:
// • A UV-style gradient test card as the backdrop.
// • A long decaying spiral coiling around the center.
// • A filled disc and two rectangles (one deliberately inverted, so it
//   draws nothing — the library shrugs at degenerate geometry).
// • The whole scene softened by a Gaussian blur, darker along the borders.
// The result lands in demo.png next to where you ran it.

use soft_canvas::{Canvas, Error, GaussianWeight, Rgba, Vector};

fn main() -> Result<(), Error> {
    /* --- Canvas setup ---
       Visual: nothing yet; a transparent-black buffer in memory. */
    let mut canvas = Canvas::new(640, 480);
    let center = Vector::new(320.0, 240.0);

    /* --- Backdrop ---
       Visual: red grows to the right, green grows downward, constant blue. */
    canvas.draw_gradient();

    /* --- Shapes on top --- */
    canvas.draw_spiral(Rgba::opaque(255, 255, 255), center); // white coil
    canvas.draw_circle(Rgba::opaque(20, 20, 60), center, 40); // dark disc
    canvas.draw_rect(
        Rgba::opaque(240, 200, 40),
        Vector::new(40.0, 40.0),
        Vector::new(120.0, 90.0),
    );
    // Inverted corners on purpose: draws nothing, and that's fine.
    canvas.draw_rect(
        Rgba::opaque(240, 40, 40),
        Vector::new(600.0, 440.0),
        Vector::new(560.0, 400.0),
    );
    canvas.draw_line(
        Rgba::opaque(0, 0, 0),
        Vector::new(0.0, 470.0),
        Vector::new(639.0, 10.0),
    );

    /* --- Soften ---
       Visual: the crisp shapes go slightly fuzzy; edges darken a touch. */
    canvas.blur(2, &GaussianWeight::new(1.5));

    /* --- Hand off to the encoder ---
       The canvas contract: row-major RGBA bytes, stride = width * 4. */
    let (w, h) = (canvas.width() as u32, canvas.height() as u32);
    let img = image::RgbaImage::from_raw(w, h, canvas.into_pixels())
        .ok_or_else(|| Error::Buffer(format!("{w}x{h} RGBA buffer has the wrong length")))?;
    img.save("demo.png")
        .map_err(|e| Error::Encode(format!("Save demo.png: {e}")))?;

    println!("wrote demo.png ({w}x{h})");
    Ok(())
}
