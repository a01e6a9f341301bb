use dbusig_core::{SignatureOptions, dbus_signatures};

fn main() {
    let options = SignatureOptions::default().with_complete_types(1, Some(3));
    let generator = dbus_signatures(&options).expect("valid options");
    for signature in generator.sample(2024, 10) {
        println!("{signature}");
    }
}
