fn main() {
    println!("cargo:rerun-if-changed=resources/windows/resources.rc");

    // Only compile Windows resources on Windows target
    #[cfg(target_os = "windows")]
    {
        // Embed the version information block
        let _ = embed_resource::compile("resources/windows/resources.rc", embed_resource::NONE);
    }
}
