use clap::Parser;
use parkon_client::utils::{logger, validation::Validate};
use parkon_client::{CliConfig, ParkonClient, ParkonError, ReservationEngine};

async fn run(config: &CliConfig) -> Result<serde_json::Value, ParkonError> {
    // 載入並驗證服務設定
    let settings = config.client_settings()?;
    settings.validate()?;

    // 建立客戶端並執行預約
    let client = ParkonClient::new(settings)?;
    let engine = ReservationEngine::new(client);
    engine.run(&config.reservation_request()).await
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    // 輸出結果，失敗時依錯誤類別決定退出碼
    match run(&config).await {
        Ok(response) => {
            let rendered =
                serde_json::to_string_pretty(&response).unwrap_or_else(|_| response.to_string());
            println!("{}", rendered);
        }
        Err(e) => {
            tracing::error!("Reservation failed: {} (category: {:?})", e, e.category());
            println!("{}", e);
            std::process::exit(e.exit_code());
        }
    }
}
