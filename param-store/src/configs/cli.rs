use clap::Parser;

pub const DEFAULT_REGION: &str = "eu-west-1";

#[derive(Parser, Debug, Clone)]
#[command(name = "ssm-param", version, about = "AWS Systems Manager Parameter Store client", long_about = None)]
pub struct CliArgs {
    /// AWS region to fetch the parameters.
    #[arg(long = "aws-region", default_value = DEFAULT_REGION)]
    pub aws_region: String,

    /// Operation to run. Options: put/get/get-all/del
    #[arg(long)]
    pub op: Option<String>,

    /// Key of the parameter stored, or the path prefix for get-all.
    #[arg(long)]
    pub key: Option<String>,

    /// Value of the parameter to be stored.
    #[arg(long)]
    pub value: Option<String>,

    /// Type of the parameter to store. Options: SecureString/String/StringList
    #[arg(long = "type", default_value = "SecureString")]
    pub parameter_type: String,

    /// Silents any interaction and verification from the user.
    #[arg(long)]
    pub silent: bool,

    /// Named AWS profile from the shared config files (falls back to AWS_PROFILE).
    #[arg(long)]
    pub profile: Option<String>,

    /// Override the Parameter Store endpoint, e.g. a LocalStack URL (falls back to AWS_ENDPOINT).
    #[arg(long)]
    pub endpoint_url: Option<String>,
}
