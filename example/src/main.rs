use vela_mem::GlobalVec;

use vela_log::{info, error};

fn run() -> Result<(), Box<dyn core::error::Error>> {
    let mut vec: GlobalVec<i32> = GlobalVec::new();
    vec.push(42)?;
    vec.push(69)?;
    info!("vec holds {} elements, capacity {}", vec.len(), vec.capacity());
    let end = vec.end();
    let mut cursor = vec.begin();
    while cursor != end {
        if let Some(value) = cursor.get() {
            println!("{}", value);
        }
        cursor = cursor.advance();
    }
    vec.destroy();
    Ok(())
}

fn main() {
    if let Err(err) = vela_log::init() {
        eprintln!("failed to initialize logger: {}", err);
    }
    if let Err(err) = run() {
        error!("{}", err);
        std::process::exit(1);
    }
}
