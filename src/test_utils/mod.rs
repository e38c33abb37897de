mod logging_env;
