use log::info;

pub use aws_sdk_codepipeline::Client as CodePipelineClient;
pub use aws_sdk_elasticbeanstalk::Client as BeanstalkClient;

pub async fn get_codepipeline_client(region: &str) -> CodePipelineClient {
    let shared_config = aws_config::from_env().load().await;
    info!("Using CodePipeline region: {}", region);
    let pipeline_config = aws_sdk_codepipeline::config::Builder::from(&shared_config)
        .region(aws_sdk_codepipeline::config::Region::new(region.to_string()))
        .build();
    CodePipelineClient::from_conf(pipeline_config)
}

pub async fn get_beanstalk_client(region: &str) -> BeanstalkClient {
    let shared_config = aws_config::from_env().load().await;
    info!("Using Elastic Beanstalk region: {}", region);
    let beanstalk_config = aws_sdk_elasticbeanstalk::config::Builder::from(&shared_config)
        .region(aws_sdk_elasticbeanstalk::config::Region::new(region.to_string()))
        .build();
    BeanstalkClient::from_conf(beanstalk_config)
}
