use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=NODE_LIB_DIR");

    // Check the target, not the host, so cross builds link correctly
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    match target_os.as_str() {
        "macos" | "ios" => {
            // N-API lives in the node binary; let dyld bind it at load time
            println!("cargo:rustc-cdylib-link-arg=-undefined");
            println!("cargo:rustc-cdylib-link-arg=dynamic_lookup");
        }
        "windows" => match env::var("NODE_LIB_DIR") {
            Ok(dir) => {
                println!("cargo:rustc-link-search=native={}", dir);
                println!("cargo:rustc-link-lib=node");
            }
            Err(_) => {
                println!("cargo:warning=NODE_LIB_DIR is not set; linking yield-main-node needs node.lib");
            }
        },
        _ => {}
    }
}
