// Compiles the RON databases under data/ into postcard blobs and generates
// name -> id lookup tables, so the game ships with its static data baked in.

use schema::{validate_catalog, ItemData, MonsterSpecies, MoveData};
use serde::de::DeserializeOwned;
use std::env;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=data");
    println!("cargo:rerun-if-changed=build.rs");

    let data_dir = Path::new("data");
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts"));

    let species: Vec<MonsterSpecies> = load_ron(&data_dir.join("monsters.ron"));
    let moves: Vec<MoveData> = load_ron(&data_dir.join("moves.ron"));
    let items: Vec<ItemData> = load_ron(&data_dir.join("items.ron"));

    let problems = validate_catalog(&species, &moves, &items);
    if !problems.is_empty() {
        panic!("Static data failed validation:\n  {}", problems.join("\n  "));
    }

    write_blob(&out_dir.join("species.bin"), &species);
    write_blob(&out_dir.join("moves.bin"), &moves);
    write_blob(&out_dir.join("items.bin"), &items);

    let generated = out_dir.join("generated_data.rs");
    let file = fs::File::create(&generated).expect("create generated_data.rs");
    let mut out = BufWriter::new(file);

    writeln!(
        out,
        "pub(crate) static COMPILED_SPECIES: &[u8] = include_bytes!(concat!(env!(\"OUT_DIR\"), \"/species.bin\"));"
    )
    .expect("write generated_data.rs");
    writeln!(
        out,
        "pub(crate) static COMPILED_MOVES: &[u8] = include_bytes!(concat!(env!(\"OUT_DIR\"), \"/moves.bin\"));"
    )
    .expect("write generated_data.rs");
    writeln!(
        out,
        "pub(crate) static COMPILED_ITEMS: &[u8] = include_bytes!(concat!(env!(\"OUT_DIR\"), \"/items.bin\"));"
    )
    .expect("write generated_data.rs");

    let species_keys: Vec<(String, u16)> = species
        .iter()
        .map(|s| (lookup_key(&s.name), s.id))
        .collect();
    write_id_map(&mut out, "SPECIES_IDS", &species_keys);

    let move_keys: Vec<(String, u16)> = moves.iter().map(|m| (lookup_key(&m.name), m.id)).collect();
    write_id_map(&mut out, "MOVE_IDS", &move_keys);
}

fn load_ron<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    ron::from_str(&content).unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e))
}

fn write_blob<T: serde::Serialize>(path: &Path, records: &[T]) {
    let bytes = postcard::to_allocvec(records)
        .unwrap_or_else(|e| panic!("Failed to encode {}: {}", path.display(), e));
    fs::write(path, bytes).unwrap_or_else(|e| panic!("Failed to write {}: {}", path.display(), e));
}

/// Lowercase, space-free key so "Flame Wheel" and "flame_wheel" resolve alike.
fn lookup_key(name: &str) -> String {
    name.to_lowercase().replace([' ', '-'], "_")
}

fn write_id_map(out: &mut impl Write, name: &str, entries: &[(String, u16)]) {
    let mut map = phf_codegen::Map::new();
    for (key, id) in entries {
        map.entry(key.as_str(), &id.to_string());
    }
    writeln!(
        out,
        "pub(crate) static {}: phf::Map<&'static str, u16> = {};",
        name,
        map.build()
    )
    .expect("write generated_data.rs");
}
