//! Canvas demo
//!
//! Walks through the canvas API step by step, printing each intermediate
//! canvas to stdout. Logs go to stderr (`RUST_LOG=debug` for details).

mod config;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use textcanvas::geometry::signed;
use textcanvas::{Canvas, CanvasError, Point, Rect, Transparency};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{CliArgs, Config};

const CAT: &str = r"
 /\_/\
( o.o )
 > ^ <
";

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = CliArgs::parse();
    let config = match Config::load_with_args(&args) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        },
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Demo failed: {}", e);
            ExitCode::FAILURE
        },
    }
}

fn show(caption: &str, canvas: &Canvas) {
    println!("{}", caption);
    println!("{}", canvas);
}

fn run(config: &Config) -> Result<(), CanvasError> {
    tracing::info!("Running demo on a {} canvas", config.dimensions());
    let (width, height) = (config.width, config.height);

    let mut main = Canvas::new(width, height);
    main.fill(config.fill)?;
    show("A new canvas, filled:", &main);

    // A smaller canvas, overfilled: the write stops at the last cell
    let mut junk = Canvas::new((width / 2).max(1), (height / 3).max(1));
    let half = junk.len();
    let text = format!("{}XX{}", "!".repeat(half), "!".repeat(half));
    let written = junk.write_text(&text)?;
    show(
        &format!("A second canvas; {} of {} characters fit:", written, text.chars().count()),
        &junk,
    );

    main.draw(&junk, Point::ORIGIN, &Transparency::Opaque);
    show("The second canvas drawn into the first:", &main);

    let corner = Point::new(signed(width * 7 / 10), signed(height * 3 / 4));
    main.draw(&junk, corner, &Transparency::Opaque);
    show("Drawn again lower right; it is clipped at the edges:", &main);

    let swapped = junk.replace('X', 'O')?;
    main.draw(&junk, Point::new(-7, corner.y), &Transparency::Opaque);
    show(
        &format!("Replaced {} X's with O's and drew it at a negative offset:", swapped),
        &main,
    );

    for _ in 0..2 {
        if let Err(e) = main.write_text("Z") {
            tracing::warn!("Could not write Z: {}", e);
        }
    }
    show("Two Z's written where the last draw left the cursor:", &main);

    let target = main.cursor().offset(-5, -3);
    match main.set_cursor(target.x, target.y) {
        Ok(()) => {
            let written = main.write_text(&config.message)?;
            show(
                &format!("Moved the cursor and wrote {} characters:", written),
                &main,
            );
        },
        Err(e) => tracing::warn!("Skipping long write: {}", e),
    }

    let cat = Canvas::from_text(CAT.trim_start_matches('\n'));
    show("A canvas sized to fit some text:", &cat);

    main.draw(&cat, Point::new(1, -1), &Transparency::Unset);
    show("Drawn with unset cells transparent:", &main);

    main.set_cursor(0, 0)?;
    while main.write_text("///////////////////////////").is_ok() {}
    main.draw(&cat, Point::new(1, -1), &Transparency::chars([Canvas::UNSET, ' ']));
    show("A new background, with spaces transparent as well:", &main);

    let mut wallpaper = Canvas::new(width, height / 2);
    let cells = wallpaper.tile(&cat, &Transparency::Opaque);
    show(&format!("Tiled ({} cells):", cells), &wallpaper);

    let cropped = main.crop(Rect::new(0, 0, 10, 5))?;
    let mut copy = cropped.clone();
    copy.replace('/', '.')?;
    show("A crop of the top-left corner:", &cropped);
    show("Its copy, edited independently:", &copy);

    Ok(())
}
