use devserve::{config, logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional config file path (without extension) as the only argument
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::Config::load_from(&config_path)?;
    logger::init(&cfg)?;

    // 创建 Tokio 运行时，根据 workers 配置设置线程数
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
        logger::log_info(&format!("[CONFIG] Using {workers} worker threads"));
    } else {
        logger::log_info("[CONFIG] Using default worker threads (CPU cores)");
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(server::run(cfg))
}
