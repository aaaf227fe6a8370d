//! Benchmarks for the texgen pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use texgen::process::{replace_colour, split_bitmap};
use texgen::recipe::RecipeFile;
use texgen::{
    rasterize_grid, rasterize_shape, Bitmap, Colour, Fill, Gradient, GradientDirection, Point,
    Shape, ShapeParams,
};

const RECIPE: &str = r##"
textures:
  - name: orb
    size: 64
    shape: { kind: circle, center: [32, 32], radius: 28 }
    fill:
      type: gradient
      background: transparent
      gradient:
        colours:
          - { at: 0.0, colour: white }
          - { at: 1.0, colour: "#3366FF" }
  - name: frame
    size: 64
    shape: { kind: ring, center: [32, 32], outer-radius: 30, inner-radius: 24 }
    fill: { type: flat, inside: "#222222", outside: transparent }
"##;

// -- Parsing benchmarks --

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    group.bench_function("parse_recipe", |b| {
        b.iter(|| RecipeFile::parse(black_box(RECIPE)).unwrap())
    });

    group.finish();
}

// -- Rasterizing benchmarks --

fn bench_rasterizing(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterizing");

    let circle = ShapeParams::new(
        Shape::Circle {
            center: Point::new(512.0, 512.0),
            radius: 400.0,
        },
        Fill::flat(Colour::WHITE, Colour::TRANSPARENT),
    );
    group.bench_function("circle_1024", |b| {
        b.iter(|| rasterize_shape(black_box(&circle), 1024, 1024).unwrap())
    });

    let gradient = Gradient::linear(Colour::BLACK, Colour::RED);
    let rectangle = ShapeParams::new(
        Shape::Rectangle {
            center: Point::new(256.0, 256.0),
            width: 400.0,
            height: 300.0,
        },
        Fill::Gradient {
            gradient,
            background: Colour::TRANSPARENT,
            direction: GradientDirection::FromCenterEdge,
        },
    );
    group.bench_function("gradient_rectangle_512", |b| {
        b.iter(|| rasterize_shape(black_box(&rectangle), 512, 512).unwrap())
    });

    group.bench_function("grid_512", |b| {
        b.iter(|| rasterize_grid(512, 512, black_box(16), Colour::BLACK, Colour::WHITE).unwrap())
    });

    let recipe = RecipeFile::parse(RECIPE).unwrap();
    group.bench_function("recipe_render", |b| {
        b.iter(|| {
            for texture in &recipe.textures {
                black_box(texture.render(128).unwrap());
            }
        })
    });

    group.finish();
}

// -- Processing benchmarks --

fn bench_processing(c: &mut Criterion) {
    let mut group = c.benchmark_group("processing");

    let sheet = Bitmap::from_fn(1030, 1030, |x, y| {
        if (x / 7 + y / 5) % 3 == 0 {
            Colour::GREEN
        } else {
            Colour::BLUE
        }
    })
    .unwrap();

    group.bench_function("split_1030_into_8x8", |b| {
        b.iter(|| split_bitmap(black_box(&sheet), 8, 8).unwrap())
    });

    group.bench_function("replace_colour_1030", |b| {
        b.iter(|| replace_colour(black_box(&sheet), Colour::GREEN, Colour::RED))
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_rasterizing, bench_processing);
criterion_main!(benches);
