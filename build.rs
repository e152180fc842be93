fn main() {
    uniffi::generate_scaffolding("src/fairway.udl").expect("invalid UDL");
}
