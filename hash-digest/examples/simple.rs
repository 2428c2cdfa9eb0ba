use hash_digest::{digest_reader, Md5, Md5Hash, Sha256};
use hash_value::HashValue;

fn main() {
    let checksum = HashValue::digest(&Md5, b"Hello World!");
    println!("md5(\"Hello World!\") = {}", checksum);
    println!("grouped             = {}", checksum.format("D").unwrap());

    let parsed: Md5Hash = "ed07-6287-532e-8636-5e84-1e92-bfc5-0d8c"
        .parse()
        .expect("valid grouped hash code");
    assert_eq!(parsed, checksum);

    let reader = std::io::Cursor::new(b"streamed content".to_vec());
    let sha = digest_reader(&Sha256, reader).expect("in-memory read");
    println!("sha256(stream)      = {}", sha);
}
