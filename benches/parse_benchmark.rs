use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kml_model::parser::parse_model;
use kml_model::{AssetMap, Document, Element, Feature, Placemark};
use std::fs::File;
use std::io::Write;
use tempfile::NamedTempFile;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Generate KML with `placemarks` model placemarks
fn generate_kml(placemarks: usize) -> String {
    let mut kml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
"#,
    );

    for i in 0..placemarks {
        let lon = -180.0 + (i % 360) as f64;
        let lat = -90.0 + (i % 180) as f64;
        kml.push_str(&format!(
            r#"    <Placemark>
      <name>Model {i}</name>
      <Model>
        <altitudeMode>relativeToGround</altitudeMode>
        <Location><longitude>{lon}</longitude><latitude>{lat}</latitude><altitude>{i}</altitude></Location>
        <Orientation><heading>{h}</heading><tilt>0</tilt><roll>0</roll></Orientation>
        <Scale><x>1</x><y>1</y><z>1</z></Scale>
        <Link><href>models/model{m}.dae</href></Link>
      </Model>
    </Placemark>
"#,
            h = i % 360,
            m = i % 10,
        ));
    }

    kml.push_str("  </Document>\n</kml>\n");
    kml
}

/// Generate a KMZ with the given KML and ten models plus ten textures
fn generate_kmz(placemarks: usize) -> NamedTempFile {
    let temp_file = NamedTempFile::new().unwrap();
    let mut zip = ZipWriter::new(temp_file.reopen().unwrap());
    let options = SimpleFileOptions::default();

    zip.start_file("doc.kml", options).unwrap();
    zip.write_all(generate_kml(placemarks).as_bytes()).unwrap();

    for m in 0..10 {
        zip.start_file(format!("models/model{}.dae", m), options)
            .unwrap();
        zip.write_all(&vec![b'x'; 4096]).unwrap();
        zip.start_file(format!("images/tex{}.png", m), options)
            .unwrap();
        zip.write_all(&vec![b'y'; 4096]).unwrap();
    }

    zip.finish().unwrap();
    temp_file
}

fn bench_parse_model(c: &mut Criterion) {
    let element = Element::parse(
        r#"<Placemark><Model>
  <Location><longitude>-77.0</longitude><latitude>38.9</latitude><altitude>100</altitude></Location>
  <Orientation><heading>90</heading><tilt>0</tilt><roll>0</roll></Orientation>
  <Scale><x>2</x><y>1</y><z>1</z></Scale>
  <Link><href>model.dae</href></Link>
</Model></Placemark>"#,
    )
    .unwrap();
    let assets: AssetMap = (0..20)
        .map(|i| (format!("tex{}.png", i), vec![0u8; 1024]))
        .chain(std::iter::once(("model.dae".to_string(), vec![1u8; 1024])))
        .collect();

    c.bench_function("parse_model", |b| {
        b.iter(|| {
            let mut output = Feature::new();
            parse_model(Placemark::new(black_box(&element), &assets), &mut output);
            black_box(output)
        });
    });
}

fn bench_parse_kml(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_kml");

    for &placemarks in &[10, 100, 1000] {
        let kml = generate_kml(placemarks);
        group.bench_with_input(BenchmarkId::new("placemarks", placemarks), &kml, |b, kml| {
            b.iter(|| black_box(Document::from_kml_str(kml).unwrap()));
        });
    }

    group.finish();
}

fn bench_parse_kmz(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_kmz");
    group.sample_size(20);

    for &placemarks in &[100, 1000] {
        let temp_file = generate_kmz(placemarks);
        let path = temp_file.path();

        group.bench_with_input(
            BenchmarkId::new("placemarks", placemarks),
            &path,
            |b, &path| {
                b.iter(|| {
                    let file = File::open(path).unwrap();
                    black_box(Document::from_reader(file).unwrap())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_parse_model, bench_parse_kml, bench_parse_kmz);
criterion_main!(benches);
